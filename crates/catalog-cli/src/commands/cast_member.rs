//! `catalog cast-member ...`

use catalog_core::prelude::{CastMember, CastMemberId, CreateCastMember, UpdateCastMember};

use crate::{
    cli::CastMemberCommands,
    commands::Services,
    error::CliResult,
    output::OutputManager,
    view::CastMemberView,
};

pub fn execute(cmd: CastMemberCommands, services: Services, output: OutputManager) -> CliResult<()> {
    let service = services.cast_members;

    match cmd {
        CastMemberCommands::Create(args) => {
            let id = service.create(CreateCastMember {
                name: args.name,
                kind: args.kind.map(Into::into),
            })?;
            output.emit(&serde_json::json!({ "id": id.as_str() }), |out| {
                out.success(&format!("Created cast member {id}"))
            })
        }
        CastMemberCommands::Update { id, fields } => {
            let id = service.update(UpdateCastMember {
                id: CastMemberId::from(id),
                name: fields.name,
                kind: fields.kind.map(Into::into),
            })?;
            output.emit(&serde_json::json!({ "id": id.as_str() }), |out| {
                out.success(&format!("Updated cast member {id}"))
            })
        }
        CastMemberCommands::Get { id } => {
            let member = service.get(&CastMemberId::from(id))?;
            output.emit(&CastMemberView::from(&member), |out| show(out, &member))
        }
        CastMemberCommands::Delete { id } => {
            let id = CastMemberId::from(id);
            service.delete(&id)?;
            output.emit(&serde_json::json!({ "deleted": id.as_str() }), |out| {
                out.success(&format!("Deleted cast member {id}"))
            })
        }
        CastMemberCommands::List => {
            let members = service.list()?;
            let views: Vec<_> = members.iter().map(CastMemberView::from).collect();
            output.emit(&views, |out| {
                if members.is_empty() {
                    return out.info("No cast members yet");
                }
                out.header("Cast members:")?;
                for m in &members {
                    out.print(&format!("  {}  {} ({})", m.id(), m.name(), m.kind()))?;
                }
                Ok(())
            })
        }
    }
}

fn show(out: &OutputManager, m: &CastMember) -> std::io::Result<()> {
    out.header(m.name())?;
    out.field("id", m.id())?;
    out.field("type", m.kind())?;
    out.field("created at", m.created_at().to_rfc3339())?;
    out.field("updated at", m.updated_at().to_rfc3339())?;
    Ok(())
}
