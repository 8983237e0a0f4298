
mod utils;
