pub mod digibot_system_prompt;
