/*!
   Constructs for running and driving the node, network generator and
   relayer binaries through their command line.
*/

pub mod cli;
pub mod driver;
pub mod exec;
pub mod ext;
