mod dispatch_tests;
mod test_helpers;
