pub mod mock_resolver;
