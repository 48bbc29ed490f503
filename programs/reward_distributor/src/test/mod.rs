pub mod test_distributor_state;
