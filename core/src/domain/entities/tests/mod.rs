mod order_tests;
