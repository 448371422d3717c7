//! `catalog genre ...`

use catalog_core::prelude::{CategoryId, CreateGenre, Genre, GenreId, UpdateGenre};

use crate::{
    cli::{GenreArgs, GenreCommands},
    commands::Services,
    error::CliResult,
    output::OutputManager,
    view::GenreView,
};

pub fn execute(cmd: GenreCommands, services: Services, output: OutputManager) -> CliResult<()> {
    let service = services.genres;

    match cmd {
        GenreCommands::Create(args) => {
            let id = service.create(CreateGenre {
                name: args.name,
                active: !args.inactive,
                categories: category_ids(args.categories),
            })?;
            output.emit(&serde_json::json!({ "id": id.as_str() }), |out| {
                out.success(&format!("Created genre {id}"))
            })
        }
        GenreCommands::Update { id, fields } => {
            let id = service.update(update_command(GenreId::from(id), fields))?;
            output.emit(&serde_json::json!({ "id": id.as_str() }), |out| {
                out.success(&format!("Updated genre {id}"))
            })
        }
        GenreCommands::Get { id } => {
            let genre = service.get(&GenreId::from(id))?;
            output.emit(&GenreView::from(&genre), |out| show(out, &genre))
        }
        GenreCommands::Delete { id } => {
            let id = GenreId::from(id);
            service.delete(&id)?;
            output.emit(&serde_json::json!({ "deleted": id.as_str() }), |out| {
                out.success(&format!("Deleted genre {id}"))
            })
        }
        GenreCommands::List => {
            let genres = service.list()?;
            let views: Vec<_> = genres.iter().map(GenreView::from).collect();
            output.emit(&views, |out| {
                if genres.is_empty() {
                    return out.info("No genres yet");
                }
                out.header("Genres:")?;
                for g in &genres {
                    out.print(&format!(
                        "  {}  {} ({} categories)",
                        g.id(),
                        g.name(),
                        g.categories().len()
                    ))?;
                }
                Ok(())
            })
        }
    }
}

fn category_ids(raw: Vec<String>) -> Vec<CategoryId> {
    raw.into_iter().map(CategoryId::from).collect()
}

fn update_command(id: GenreId, args: GenreArgs) -> UpdateGenre {
    UpdateGenre {
        id,
        name: args.name,
        active: !args.inactive,
        categories: category_ids(args.categories),
    }
}

fn show(out: &OutputManager, g: &Genre) -> std::io::Result<()> {
    out.header(g.name())?;
    out.field("id", g.id())?;
    out.field("active", g.is_active())?;
    let categories: Vec<_> = g.categories().iter().map(ToString::to_string).collect();
    out.field("categories", categories.join(", "))?;
    out.field("created at", g.created_at().to_rfc3339())?;
    out.field("updated at", g.updated_at().to_rfc3339())?;
    Ok(())
}
