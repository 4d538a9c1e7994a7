/*!
   Functions for bootstrapping a local network in an imperative way.

   [`single::bootstrap_network`] runs the whole flow. The other modules
   expose the individual stages for callers that need more control over
   when each stage runs.
*/

pub mod init;
pub mod network;
pub mod single;
pub mod validator;
