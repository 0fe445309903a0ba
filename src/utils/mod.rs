pub mod angles;
