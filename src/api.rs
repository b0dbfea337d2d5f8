pub mod dtu;
