//! Error type used by the bootstrap pipeline.

use core::str::Utf8Error;
use eyre::Report;
use flex_error::{define_error, TraceError};
use std::io::Error as IoError;

define_error! {
    Error {
        Generic
            [ TraceError<Report> ]
            | _ | { "generic error" },

        Io
            [ TraceError<IoError> ]
            | _ | { "io error"},

        Exec
            { program: String }
            [ TraceError<IoError> ]
            | e | {
                format_args!("failed to execute command `{}`", e.program)
            },

        Utf8
            [ TraceError<Utf8Error> ]
            | _ | { "command output is not valid utf-8" },

        ExternalCommandFailed
            {
                program: String,
                args: Vec<String>,
                exit_code: Option<i32>,
                stderr: String,
            }
            | e | {
                format_args!("command `{} {}` exited with status {:?} and message: {}",
                    e.program, e.args.join(" "), e.exit_code, e.stderr)
            },

        ConfigGenerationFailed
            {
                program: String,
                args: Vec<String>,
                exit_code: Option<i32>,
                stderr: String,
            }
            | e | {
                format_args!("network generator `{} {}` exited with status {:?} and message: {}",
                    e.program, e.args.join(" "), e.exit_code, e.stderr)
            },

        ConfigParseFailed
            { path: String, reason: String }
            | e | {
                format_args!("failed to parse network config file {}: {}", e.path, e.reason)
            },

        OutputParseFailed
            {
                command: String,
                field: String,
                output: String,
            }
            | e | {
                format_args!("expected field `{}` in the output of `{}`, got: {}",
                    e.field, e.command, e.output)
            },

        ConfigFile
            { path: String }
            [ TraceError<toml::de::Error> ]
            | e | {
                format_args!("invalid bootstrap configuration file {}", e.path)
            },

        ProcessWait
            { program: String }
            [ TraceError<IoError> ]
            | e | {
                format_args!("failed to wait for process `{}` to exit", e.program)
            },

        CompletionDropped
            { program: String }
            | e | {
                format_args!("supervisor of process `{}` stopped before reporting its exit", e.program)
            },
    }
}

pub fn handle_generic_error(e: impl Into<Report>) -> Error {
    Error::generic(e.into())
}

pub fn handle_exec_error(program: &str) -> impl FnOnce(IoError) -> Error + '_ {
    |e| Error::exec(program.to_string(), e)
}

impl From<Report> for Error {
    fn from(e: Report) -> Self {
        Error::generic(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::io(e)
    }
}

impl From<Utf8Error> for Error {
    fn from(e: Utf8Error) -> Self {
        Error::utf8(e)
    }
}

