#![allow(dead_code)]

use baconpath_core::{ActorGraph, parse_actor_graph};
use std::io::Cursor;

// Kevin Bacon - Tom Hanks - Elizabeth Perkins, Bill Paxton beside both of
// the first two, and an island nobody else can reach.
pub const TEST_LISTING: &str = "\
Movie: Apollo 13
Actor: Kevin Bacon
Actor: Tom Hanks
Actor: Bill Paxton
Movie: Big
Actor: Tom Hanks
Actor: Elizabeth Perkins
Movie: Island
Actor: Lonely One
Actor: Lonely Two
";

pub fn create_test_graph() -> ActorGraph {
    parse_actor_graph(Cursor::new(TEST_LISTING)).unwrap()
}
