use clap::Args;

use crate::error::Result;
use crate::services::ServiceFactory;

#[derive(Args)]
pub struct ProvidersArgs {
    /// Print names as a JSON array
    #[arg(long)]
    json: bool,
}

pub async fn execute(args: ProvidersArgs, services: &ServiceFactory) -> Result<()> {
    let search = services.create_search_service()?;
    let names = search.providers();

    if args.json {
        println!("{}", serde_json::to_string(&names)?);
        return Ok(());
    }

    println!("Supported karaoke providers:");
    for name in names {
        println!("  {}", name);
    }

    Ok(())
}
