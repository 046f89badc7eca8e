pub mod cli;
mod list;
