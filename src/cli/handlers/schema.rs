use crate::graphql::sdl;
use anyhow::Result;

pub fn handle_schema() -> Result<()> {
    print!("{}", sdl());
    Ok(())
}
