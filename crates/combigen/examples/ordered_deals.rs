//! Enumerate ordered deals of cards to players.
//!
//! Purpose
//! - Show the typical consumer loop: pull from a port until exhaustion, with
//!   the gather layer turning index tuples into typed output.
//! - Demonstrate the priority wrapper: promote a deal mid-run and watch it
//!   replay first after a reset.

use combigen::prelude::*;

fn main() {
    // Every way to deal 2 of 4 cards in order: 4!/2! = 12 deals.
    let cards = ["A♠", "K♥", "Q♦", "J♣"];
    let port = Arrangements::new(cards.len(), 2).expect("n >= k");
    let mut deals = Gather::new(port, &cards);
    let mut count = 0;
    while let Some(deal) = deals.take_next() {
        println!("deal {:2}: {}", count, deal.join(" "));
        count += 1;
    }
    println!("total deals: {count}");

    // Promote the third seating order of three players, then replay.
    let mut seatings = PriorityPermutations::new(3);
    seatings.take_next();
    seatings.take_next();
    seatings.take_next();
    seatings.nice();
    println!("promoted: {:?}", seatings.current());
    seatings.reset();
    println!("replay order after reset:");
    while let Some(seating) = seatings.take_next() {
        println!("  {seating:?}");
    }
}
