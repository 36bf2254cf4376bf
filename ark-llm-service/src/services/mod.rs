pub mod ark_chat_service;
