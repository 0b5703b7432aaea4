mod filter_engine_tests;
