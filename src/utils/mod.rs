pub mod session_flags;
