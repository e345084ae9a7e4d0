pub mod hyper;
