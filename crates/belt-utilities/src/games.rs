//! Local toy utilities: console calculator and the ghost game

use async_trait::async_trait;
use belt_core::console::prompt_line;
use belt_core::utility::{Utility, UtilityError};
use rand::Rng;

/// One arithmetic operation the calculator supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "a" => Some(Self::Add),
            "s" => Some(Self::Subtract),
            "m" => Some(Self::Multiply),
            "d" => Some(Self::Divide),
            _ => None,
        }
    }

    fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

fn compute(a: i64, b: i64, op: Operation) -> Option<i64> {
    match op {
        Operation::Add => a.checked_add(b),
        Operation::Subtract => a.checked_sub(b),
        Operation::Multiply => a.checked_mul(b),
        Operation::Divide => a.checked_div(b),
    }
}

/// Two-operand integer calculator
pub struct CalculatorUtility;

impl CalculatorUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CalculatorUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for CalculatorUtility {
    fn name(&self) -> &str {
        "Console Calculator"
    }

    fn aliases(&self) -> &[&str] {
        &["calc"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        println!("Console Calculator");
        println!("------------------------");
        println!();

        println!("Type a number, and then press Enter");
        let Ok(num1) = prompt_line("")?.parse::<i64>() else {
            println!("Input was not an integer");
            return Ok(());
        };

        println!("Type another number, and then press Enter");
        let Ok(num2) = prompt_line("")?.parse::<i64>() else {
            println!("Input was not an integer");
            return Ok(());
        };

        println!("Choose an option from the following list:");
        println!("\ta - Add");
        println!("\ts - Subtract");
        println!("\tm - Multiply");
        println!("\td - Divide");
        let token = prompt_line("Your option? ")?;

        let Some(op) = Operation::parse(&token) else {
            println!("Unknown option");
            return Ok(());
        };

        match compute(num1, num2, op) {
            Some(result) => println!(
                "Your result: {num1} {} {num2} = {result}",
                op.symbol()
            ),
            None => println!("That computation is not possible"),
        }
        Ok(())
    }
}

/// Which of the three doors the player opened
fn parse_door(input: &str) -> Option<u32> {
    let door = input.trim().parse::<u32>().ok()?;
    (1..=3).contains(&door).then_some(door)
}

/// Open doors until the ghost gets you; score is rooms survived
pub struct GhostGameUtility;

impl GhostGameUtility {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GhostGameUtility {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Utility for GhostGameUtility {
    fn name(&self) -> &str {
        "Ghost Game"
    }

    fn aliases(&self) -> &[&str] {
        &["ghost"]
    }

    async fn run(&self) -> Result<(), UtilityError> {
        let mut score = 0u32;

        loop {
            let ghost_door = rand::thread_rng().gen_range(1..=3);

            println!();
            println!("There are three doors ahead!");
            println!();
            println!("A ghost is behind one of them :O!");
            println!();
            println!("Which door do you open?!?!");
            println!();
            println!("1, 2 or 3?");
            println!();

            let door = loop {
                let raw = prompt_line("")?;
                match parse_door(&raw) {
                    Some(door) => break door,
                    None => {
                        println!();
                        if raw.trim().parse::<i64>().is_ok() {
                            println!("There are only three doors ahead.");
                        } else {
                            println!("Input was not an integer.");
                        }
                        println!("Please select door 1, 2, or 3.");
                        println!();
                    }
                }
            };

            if door == ghost_door {
                println!();
                println!("Boo!! GHOST!");
                break;
            }

            println!();
            println!("No ghost, Phew!");
            prompt_line("Press Enter to enter the next room!")?;
            score += 1;
        }

        println!("Run!!!!!");
        println!();
        println!("Game Over! Score: {score}");
        Ok(())
    }
}
