mod xss_array;

pub use xss_array::XssArray;
