//! Self-checking teaching labs: a CSV summarizer and a password-strength
//! classifier. Each lab ships its flawed baseline next to the corrected
//! behavior so a harness run can show the difference.

pub mod check;
pub mod logging;
pub mod password;
pub mod table;
