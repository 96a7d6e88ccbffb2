//! RPN Calculator
//!
//! This example evaluates reverse Polish notation expressions with stack
//! actions.
//!
//! Key concepts:
//! - Each token becomes an action over a persistent stack
//! - Operators are written as do-notation scripts
//! - Stack underflow is an ordinary value (`StackError`), not a panic
//!
//! Run with: RUST_LOG=stateless=trace cargo run --example rpn_calculator

use stateless::core::{pure, Action};
use stateless::notation::{do_return, interpret};
use stateless::stack::{push, stackful, try_pop, try_pop_n, Stack, StackError};
use stateless::state_do;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Clone, Copy, Debug)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Token {
    Number(f64),
    Operator(Op),
}

type Outcome = Result<(), StackError>;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn parse(input: &str) -> Result<Vec<Token>, String> {
    input
        .split_whitespace()
        .map(|word| match word {
            "+" => Ok(Token::Operator(Op::Add)),
            "-" => Ok(Token::Operator(Op::Sub)),
            "*" => Ok(Token::Operator(Op::Mul)),
            "/" => Ok(Token::Operator(Op::Div)),
            _ => word
                .parse()
                .map(Token::Number)
                .map_err(|_| format!("unrecognised token '{word}'")),
        })
        .collect()
}

fn operator(op: Op) -> Action<Stack<f64>, Outcome> {
    interpret(state_do! {
        operands <- try_pop_n::<f64>(2);
        match operands {
            Ok(pair) => {
                let value = op.apply(pair[1], pair[0]);
                state_do! {
                    push(value);
                    return Ok(())
                }
            }
            Err(err) => do_return(Err(err)),
        }
    })
}

fn step(token: Token) -> Action<Stack<f64>, Outcome> {
    match token {
        Token::Number(n) => push(n).map(|()| Ok(())),
        Token::Operator(op) => operator(op),
    }
}

fn program(tokens: &[Token]) -> Action<Stack<f64>, Result<f64, StackError>> {
    // Built from the last token backwards so the chain is right-nested.
    tokens.iter().rev().fold(try_pop::<f64>(), |rest, token| {
        step(*token).bind(move |outcome| match outcome {
            Ok(()) => rest.clone(),
            Err(err) => pure(Err(err)),
        })
    })
}

fn main() {
    init_logging();

    println!("=== RPN Calculator Example ===\n");

    for expression in ["3 4 + 2 *", "10 2 8 * + 3 -", "1 +", "2 x"] {
        let tokens = match parse(expression) {
            Ok(tokens) => tokens,
            Err(reason) => {
                println!("{expression:>16}  =>  parse error: {reason}");
                continue;
            }
        };

        let (result, leftover) = stackful(program(&tokens));
        match result {
            Ok(value) => println!("{expression:>16}  =>  {value} (leftover: {leftover:?})"),
            Err(err) => println!("{expression:>16}  =>  error: {err}"),
        }
    }

    println!("\n=== Example Complete ===");
}
