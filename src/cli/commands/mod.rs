//! One module per subcommand.

pub mod add;
pub mod delete;
pub mod gen_password;
pub mod generate;
pub mod get;
pub mod init;
pub mod list;
