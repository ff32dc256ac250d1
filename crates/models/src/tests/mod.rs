/// Entity CRUD and constraint tests
pub mod crud_tests;
