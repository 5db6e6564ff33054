mod field;
mod writer;
