/*!
   Utility functions.
*/

pub mod binaries;
