/*!
   Running the cross-chain relayer against the bootstrapped node.
*/

pub mod init;
