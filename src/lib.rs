//! Ordered collections backed by self-balancing binary search trees.

#[macro_use]
extern crate log;

pub mod avl_tree;
