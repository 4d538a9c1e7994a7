/*!
   Data types shared across the bootstrap steps.
*/

pub mod address;
pub mod config;
pub mod env;
pub mod network;
pub mod process;
pub mod validator;
