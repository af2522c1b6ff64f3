//! Test-only infix reader used to check that printed expressions re-read to
//! the same tree under conventional precedence and left associativity.
#![allow(dead_code)]

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt, recognize},
    multi::fold_many0,
    sequence::{delimited, pair},
    IResult,
};
use surd_ast::{binary, literal, sqrt, BinOp, Expr};

/// Parse the printer's output format back into an expression.
pub fn parse(input: &str) -> Result<Expr, String> {
    all_consuming(parse_add_sub)(input)
        .map(|(_, expr)| expr)
        .map_err(|e| format!("failed to re-read '{}': {:?}", input, e))
}

fn parse_add_sub(input: &str) -> IResult<&str, Expr> {
    let (input, init) = parse_mul_div(input)?;
    fold_many0(
        pair(alt((char('+'), char('-'))), parse_mul_div),
        move || init.clone(),
        |acc, (op, rhs)| {
            let op = if op == '+' { BinOp::Add } else { BinOp::Sub };
            binary(op, &acc, &rhs)
        },
    )(input)
}

fn parse_mul_div(input: &str) -> IResult<&str, Expr> {
    let (input, init) = parse_factor(input)?;
    fold_many0(
        pair(alt((char('*'), char('/'))), parse_factor),
        move || init.clone(),
        |acc, (op, rhs)| {
            let op = if op == '*' { BinOp::Mul } else { BinOp::Div };
            binary(op, &acc, &rhs)
        },
    )(input)
}

fn parse_factor(input: &str) -> IResult<&str, Expr> {
    alt((
        parse_sqrt,
        delimited(char('('), parse_add_sub, char(')')),
        parse_literal,
    ))(input)
}

fn parse_sqrt(input: &str) -> IResult<&str, Expr> {
    let (rest, radicand) = delimited(tag("sqrt("), parse_add_sub, char(')'))(input)?;
    Ok((rest, sqrt(&radicand)))
}

fn parse_literal(input: &str) -> IResult<&str, Expr> {
    map_res(recognize(pair(opt(char('-')), digit1)), |digits: &str| {
        digits.parse::<i64>().map(literal)
    })(input)
}

/// Print, re-read and return the re-read expression.
pub fn reparse(expr: &Expr) -> Expr {
    let text = expr.to_string();
    parse(&text).unwrap_or_else(|e| panic!("{}", e))
}
