mod rows_tests;
