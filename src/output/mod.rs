mod response;

pub use response::finish;
