//! Theme - Colors and Visual Tokens

pub mod colors;
