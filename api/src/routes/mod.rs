pub mod generate_answer;
