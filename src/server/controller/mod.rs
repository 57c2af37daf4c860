//! HTTP request handlers.

pub mod debug;

#[cfg(test)]
mod test;
