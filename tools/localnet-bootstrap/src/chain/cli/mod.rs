/*!
   Thin wrappers around the subcommands of the node, network generator
   and keyring binaries.
*/

pub mod genesis;
pub mod keys;
pub mod network;
pub mod start;
