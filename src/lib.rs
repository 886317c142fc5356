//! # Generic Containers
//!
//! Small, strongly typed container types built on Rust generics.
//!
//! ## Holders
//! - [`Container<T>`]: exactly one value, replaceable with `set`
//! - [`Pair<T, U>`]: two independently typed values, `swap` yields `Pair<U, T>`
//!
//! ## Collections
//! - [`Stack<T>`]: LIFO with O(1) `push`, `pop`, `peek`
//! - [`SortedList<T, S>`]: always in non-decreasing order, `T: Ord`;
//!   `S` picks the insertion strategy ([`BinaryInsert`] or [`ResortOnAdd`])
//!
//! ## Free functions
//! - [`identity`], [`swap_pair`], [`merge_containers`]
//!
//! ## Fixed instantiations
//! - [`NumberContainer`] holds a [`Number`] (integer or float)
//! - [`StringContainer`] holds a `String`
//!
//! Operations that need an element (`Stack::pop`, `Stack::peek`,
//! `SortedList::min`, `SortedList::max`) return
//! [`ContainerError::EmptyCollection`] on an empty collection. Nothing else
//! can fail.

pub mod aliases;
pub mod container;
pub mod error;
pub mod functions;
pub mod order;
pub mod pair;
pub mod sorted_list;
pub mod stack;

pub use aliases::{Number, NumberContainer, StringContainer};
pub use container::Container;
pub use error::{ContainerError, Result};
pub use functions::{identity, merge_containers, swap_pair};
pub use order::{BinaryInsert, InsertStrategy, ResortOnAdd};
pub use pair::Pair;
pub use sorted_list::SortedList;
pub use stack::Stack;
