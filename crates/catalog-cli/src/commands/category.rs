//! `catalog category ...`

use catalog_core::prelude::{Category, CategoryId, CreateCategory, UpdateCategory};

use crate::{
    cli::{CategoryArgs, CategoryCommands},
    commands::Services,
    error::CliResult,
    output::OutputManager,
    view::CategoryView,
};

pub fn execute(cmd: CategoryCommands, services: Services, output: OutputManager) -> CliResult<()> {
    let service = services.categories;

    match cmd {
        CategoryCommands::Create(args) => {
            let id = service.create(create_command(args))?;
            output.emit(&serde_json::json!({ "id": id.as_str() }), |out| {
                out.success(&format!("Created category {id}"))
            })
        }
        CategoryCommands::Update { id, fields } => {
            let id = service.update(update_command(CategoryId::from(id), fields))?;
            output.emit(&serde_json::json!({ "id": id.as_str() }), |out| {
                out.success(&format!("Updated category {id}"))
            })
        }
        CategoryCommands::Get { id } => {
            let category = service.get(&CategoryId::from(id))?;
            output.emit(&CategoryView::from(&category), |out| show(out, &category))
        }
        CategoryCommands::Delete { id } => {
            let id = CategoryId::from(id);
            service.delete(&id)?;
            output.emit(&serde_json::json!({ "deleted": id.as_str() }), |out| {
                out.success(&format!("Deleted category {id}"))
            })
        }
        CategoryCommands::List => {
            let categories = service.list()?;
            let views: Vec<_> = categories.iter().map(CategoryView::from).collect();
            output.emit(&views, |out| {
                if categories.is_empty() {
                    return out.info("No categories yet");
                }
                out.header("Categories:")?;
                for c in &categories {
                    let state = if c.is_active() { "active" } else { "inactive" };
                    out.print(&format!("  {}  {} ({state})", c.id(), c.name()))?;
                }
                Ok(())
            })
        }
    }
}

fn create_command(args: CategoryArgs) -> CreateCategory {
    CreateCategory {
        name: args.name,
        description: args.description,
        active: !args.inactive,
    }
}

fn update_command(id: CategoryId, args: CategoryArgs) -> UpdateCategory {
    UpdateCategory {
        id,
        name: args.name,
        description: args.description,
        active: !args.inactive,
    }
}

fn show(out: &OutputManager, c: &Category) -> std::io::Result<()> {
    out.header(c.name())?;
    out.field("id", c.id())?;
    out.field("description", c.description().unwrap_or("-"))?;
    out.field("active", c.is_active())?;
    out.field("created at", c.created_at().to_rfc3339())?;
    out.field("updated at", c.updated_at().to_rfc3339())?;
    if let Some(deleted_at) = c.deleted_at() {
        out.field("deleted at", deleted_at.to_rfc3339())?;
    }
    Ok(())
}
