//! Counter Script
//!
//! This example builds an action once with do-notation and runs it against
//! several starting states.
//!
//! Key concepts:
//! - `do_notation` turns a script function into an action factory
//! - Building an action runs nothing; `run` does
//! - The same action gives the same answer for the same state
//!
//! Run with: cargo run --example counter_script

use stateless::core::{get, modify, Action};
use stateless::notation::{do_notation, do_return};
use stateless::state_do;

#[derive(Clone, Debug, PartialEq)]
struct Ledger {
    balance: i64,
    entries: u32,
}

fn main() {
    println!("=== Counter Script Example ===\n");

    let deposit = do_notation(|amount: i64| {
        state_do! {
            modify(move |ledger: Ledger| Ledger {
                balance: ledger.balance + amount,
                entries: ledger.entries + 1,
            });
            ledger <- get::<Ledger>();
            return ledger.balance
        }
    });

    let withdraw = do_notation(|amount: i64| {
        state_do! {
            ledger <- get::<Ledger>();
            if ledger.balance < amount {
                do_return(None)
            } else {
                state_do! {
                    modify(move |ledger: Ledger| Ledger {
                        balance: ledger.balance - amount,
                        entries: ledger.entries + 1,
                    });
                    return Some(ledger.balance - amount)
                }
            }
        }
    });

    let session: Action<Ledger, Option<i64>> = deposit(50).then(withdraw(80));

    for opening in [0, 40, 100] {
        let start = Ledger {
            balance: opening,
            entries: 0,
        };
        let (remaining, ledger) = session.run(start);
        println!("opening {opening:>4}: withdrawal -> {remaining:?}, ledger {ledger:?}");
    }

    println!("\n=== Example Complete ===");
}
