mod controls_tests;
mod graph_model_tests;
