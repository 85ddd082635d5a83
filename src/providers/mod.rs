pub mod dreamhost;
