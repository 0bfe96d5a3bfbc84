//! Tests across the three trees

mod properties;
mod sha512;
mod tampering;
