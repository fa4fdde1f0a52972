use crate::bin::error::LabyError;
use crate::bin::json_utils::{parse_command, Command};
use crate::bin::maze::Maze;
use log::{debug, warn};
use serde_json::{json, Value};

/// Applique une commande reçue au labyrinthe et construit la réponse.
///
/// Un pas est toujours exécuté en entier avant que la réponse ne soit
/// construite : le client ne voit jamais d'état intermédiaire.
pub fn process_message(maze: &mut Maze, msg: &Value) -> Value {
    let Some(command) = parse_command(msg) else {
        warn!("unknown command: {}", msg);
        return json!({ "CommandError": "UnknownCommand" });
    };
    debug!("command {:?}", command);

    match run_command(maze, command) {
        Ok(response) => response,
        Err(e) => json!({ "CommandError": e.to_string() }),
    }
}

fn run_command(maze: &mut Maze, command: Command) -> Result<Value, LabyError> {
    let response = match command {
        Command::Step => {
            let outcome = maze.advance_step()?;
            json!({
                "StepResult": {
                    "outcome": maze.outcome_json(&outcome),
                    "state": maze.snapshot(),
                }
            })
        }
        Command::State => json!({ "State": maze.snapshot() }),
        Command::Solve => {
            let steps = maze.solve()?;
            json!({
                "SolveResult": {
                    "steps": steps,
                    "state": maze.snapshot(),
                }
            })
        }
    };
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bin::description::MazeDescription;

    #[test]
    fn test_step_then_state() {
        let mut maze = MazeDescription::default().build().unwrap();
        let reply = process_message(&mut maze, &json!("Step"));
        let result = &reply["StepResult"];
        assert_eq!(result["outcome"]["Advanced"]["to"], json!([1, 0]));
        assert_eq!(result["state"]["path"], json!([[0, 0], [1, 0]]));

        let reply = process_message(&mut maze, &json!({"State": null}));
        assert_eq!(reply["State"]["current"], json!([1, 0]));
    }

    #[test]
    fn test_solve_command() {
        let mut maze = MazeDescription::default().build().unwrap();
        let reply = process_message(&mut maze, &json!("Solve"));
        assert_eq!(reply["SolveResult"]["steps"], 45);
        assert_eq!(reply["SolveResult"]["state"]["status"], "Solved");

        let reply = process_message(&mut maze, &json!("Step"));
        assert_eq!(reply["StepResult"]["outcome"], "Solved");
    }

    #[test]
    fn test_errors_are_reported() {
        let mut maze = Maze::new("_|", 2, 1).unwrap();
        let reply = process_message(&mut maze, &json!("Step"));
        assert_eq!(reply["CommandError"], "start cell is not set");

        let reply = process_message(&mut maze, &json!({"MoveTo": "Front"}));
        assert_eq!(reply["CommandError"], "UnknownCommand");
    }
}
