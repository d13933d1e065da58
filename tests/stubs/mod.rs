pub mod aqicn;
