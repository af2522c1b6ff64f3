/// Declare a unit-struct rule from its display name and body.
///
/// ```ignore
/// define_rule!(MyRule, "My Rule", |expr| {
///     let new_expr = try_rewrite(expr)?;
///     Some(Rewrite::new(new_expr, "what happened"))
/// });
/// ```
#[macro_export]
macro_rules! define_rule {
    (
        $(#[$meta:meta])*
        $struct_name:ident,
        $name_str:expr,
        | $arg:ident | $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $struct_name;

        impl $crate::rule::Rule for $struct_name {
            fn name(&self) -> &str {
                $name_str
            }

            fn apply(
                &self,
                $arg: $crate::surd_ast::ExprRef<'_>,
            ) -> Option<$crate::rule::Rewrite> {
                $body
            }
        }
    };
}
