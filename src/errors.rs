//! Create the Error, ErrorKind, ResultExt, and Result types.
//! Other modules in this crate `use crate::errors::*;` to get access to everything
//! `error_chain!` creates.

use error_chain::error_chain;

error_chain! {

    errors {
        InvalidDimensions(width: usize, height: usize) {
            description("invalid maze dimensions")
            display("invalid maze dimensions {}x{}: both must be between 1 and {}",
                    width, height, ::std::i32::MAX)
        }

        SelfLink {
            description("an edge cannot link a cell to itself")
            display("an edge cannot link a cell to itself")
        }
    }
}
