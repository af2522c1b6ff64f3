use surd_ast::AstError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CasError {
    #[error("Invalid options: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Cannot serialize options: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Invalid expression: {0}")]
    Ast(#[from] AstError),
}
