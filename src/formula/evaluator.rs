//! Precedence-climbing evaluator over board tiles.
//!
//! Grammar of the effective (non-empty) tile sequence:
//!
//! ```text
//! expr    := operand (binop operand)*
//! operand := digit | '(' expr ')'
//! ```
//!
//! `×`/`÷` bind tighter than `+`/`−`, all operators are left associative. There is no
//! unary minus and no implicit multiplication, so two operands without an operator in
//! between are unparsable. Every failure, including division by zero, yields `None`.

use super::symbol::Symbol;
use std::iter::Peekable;

/// Binding power of a binary operator tile.
fn binary_op_prec(symbol: Symbol) -> Option<u8> {
    match symbol {
        Symbol::Add | Symbol::Sub => Some(10),
        Symbol::Mul | Symbol::Div => Some(20),
        _ => None,
    }
}

fn apply(op: Symbol, lhs: f32, rhs: f32) -> Option<f32> {
    let res = match op {
        Symbol::Add => lhs + rhs,
        Symbol::Sub => lhs - rhs,
        Symbol::Mul => lhs * rhs,
        Symbol::Div => {
            if rhs == 0.0 {
                return None;
            }
            lhs / rhs
        }
        _ => return None,
    };
    res.is_finite().then_some(res)
}

/// Evaluates a tile sequence. The whole sequence must be consumed.
pub fn evaluate<I>(tokens: I) -> Option<f32>
where I: IntoIterator<Item = Symbol> {
    let mut stream = tokens.into_iter().peekable();
    let value = parse_expr(&mut stream, 0)?;
    stream.next().is_none().then_some(value)
}

fn parse_expr<I>(stream: &mut Peekable<I>, min_prec: u8) -> Option<f32>
where I: Iterator<Item = Symbol> {
    let mut lhs = parse_operand(stream)?;

    while let Some(prec) = stream.peek().copied().and_then(binary_op_prec) {
        if prec < min_prec {
            break;
        }
        let op = stream.next()?;
        let rhs = parse_expr(stream, prec + 1)?;
        lhs = apply(op, lhs, rhs)?;
    }
    Some(lhs)
}

fn parse_operand<I>(stream: &mut Peekable<I>) -> Option<f32>
where I: Iterator<Item = Symbol> {
    match stream.next()? {
        Symbol::Open => {
            let inner = parse_expr(stream, 0)?;
            (stream.next()? == Symbol::Close).then_some(inner)
        }
        sym => sym.digit().map(f32::from),
    }
}
