mod banks;
mod batch;
mod common;
