//! `sigelp` — cliente de línea de comandos del sistema de legajos.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use sigelp::api::ApiClient;
use sigelp::assembly::{self, ArtifactSlot, CancelToken};
use sigelp::config::Config;
use sigelp::models::NuevoTicket;

/// Cliente del Sistema de Gestión de Legajos del Personal.
#[derive(Parser, Debug)]
#[command(name = "sigelp")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Archivo de configuración TOML (si se omite, entorno/.env)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// URL base de la API (pisa la configuración)
    #[arg(long)]
    base_url: Option<String>,

    /// Nivel de log (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ensambla el legajo completo de una persona en un solo PDF
    Legajo {
        /// Id del personal
        personal_id: i64,
        /// Ruta del PDF de salida
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Ensambla el historial de escalafón (carátula + resoluciones)
    Escalafon {
        /// Id del personal
        personal_id: i64,
        /// Ruta del PDF de salida
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Lista una colección completa (sigue la paginación hasta el final)
    Listar {
        #[arg(value_enum)]
        entidad: Entidad,
    },

    /// Operaciones sobre tickets de mesa de partes
    Ticket {
        #[command(subcommand)]
        accion: TicketCmd,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Entidad {
    Personal,
    Areas,
    Cargos,
    Regimenes,
    Condiciones,
    Secciones,
    TiposDocumento,
    Tickets,
    Eventos,
    Usuarios,
}

#[derive(Subcommand, Debug)]
enum TicketCmd {
    /// Registra un ticket nuevo
    Crear {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        apellido: String,
        #[arg(long)]
        observaciones: String,
        /// Id del área destinataria
        #[arg(long)]
        area: Option<i64>,
    },
    /// Marca un ticket como completado
    Completar { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filtro = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filtro).init();

    let mut config = match &cli.config {
        Some(ruta) => Config::from_file(ruta)
            .with_context(|| format!("leyendo configuración de {}", ruta.display()))?,
        None => Config::from_env()?,
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    let api = ApiClient::new(&config)?;

    match cli.command {
        Commands::Legajo { personal_id, out } => {
            let bytes = assembly::ensamblar_legajo(&api, personal_id, &CancelToken::new())
                .await
                .context("no se pudo ensamblar el legajo")?;
            emitir(out, &bytes)?;
        }
        Commands::Escalafon { personal_id, out } => {
            let bytes = assembly::ensamblar_escalafon(&api, personal_id, &CancelToken::new())
                .await
                .context("no se pudo ensamblar el escalafón")?;
            emitir(out, &bytes)?;
        }
        Commands::Listar { entidad } => listar(&api, entidad).await?,
        Commands::Ticket { accion } => match accion {
            TicketCmd::Crear {
                nombre,
                apellido,
                observaciones,
                area,
            } => {
                let ticket = api
                    .crear_ticket(&NuevoTicket {
                        nombre,
                        apellido,
                        observaciones,
                        area,
                        ..NuevoTicket::default()
                    })
                    .await?;
                println!(
                    "Ticket {} creado (id {})",
                    ticket.numero_ticket.as_deref().unwrap_or("-"),
                    ticket.id
                );
            }
            TicketCmd::Completar { id } => {
                let ticket = api.completar_ticket(id).await?;
                println!(
                    "Ticket {} marcado como {}",
                    ticket.numero_ticket.as_deref().unwrap_or("-"),
                    ticket.estado.as_deref().unwrap_or("?")
                );
            }
        },
    }

    Ok(())
}

/// Escribe la salida a través de la ranura de artefactos y la conserva.
fn emitir(destino: PathBuf, bytes: &[u8]) -> Result<()> {
    let mut ranura = ArtifactSlot::new();
    ranura.reemplazar(destino, bytes)?;
    if let Some(ruta) = ranura.persistir() {
        println!("PDF generado en {}", ruta.display());
    }
    Ok(())
}

async fn listar(api: &ApiClient, entidad: Entidad) -> Result<()> {
    match entidad {
        Entidad::Personal => {
            for p in api.listar_personal().await? {
                println!(
                    "{}\t{}\t{}\t{}",
                    p.id,
                    p.dni.as_deref().unwrap_or("-"),
                    p.nombre_completo(),
                    if p.activo { "activo" } else { "inactivo" }
                );
            }
        }
        Entidad::Areas => {
            for a in api.listar_areas().await? {
                println!(
                    "{}\t{}\t{}\t{}",
                    a.id,
                    a.codigo.as_deref().unwrap_or("-"),
                    a.nombre,
                    if a.activo { "activa" } else { "inactiva" }
                );
            }
        }
        Entidad::Cargos => {
            for c in api.listar_cargos().await? {
                println!("{}\t{}", c.id, c.nombre);
            }
        }
        Entidad::Regimenes => {
            for r in api.listar_regimenes().await? {
                println!("{}\t{}", r.id, r.nombre);
            }
        }
        Entidad::Condiciones => {
            for c in api.listar_condiciones().await? {
                println!("{}\t{}", c.id, c.nombre);
            }
        }
        Entidad::Secciones => {
            for s in api.listar_secciones().await? {
                println!(
                    "{}\t{}\torden {}\t{}",
                    s.id,
                    s.nombre,
                    s.orden.map_or("-".to_string(), |o| o.to_string()),
                    if s.activo { "activa" } else { "inactiva" }
                );
            }
        }
        Entidad::TiposDocumento => {
            for t in api.listar_tipos_documento().await? {
                println!(
                    "{}\t{}\t{}",
                    t.id,
                    t.codigo.as_deref().unwrap_or("-"),
                    t.nombre
                );
            }
        }
        Entidad::Tickets => {
            for t in api.listar_tickets().await? {
                println!(
                    "{}\t{}\t{} {}\t{}",
                    t.id,
                    t.numero_ticket.as_deref().unwrap_or("-"),
                    t.nombre.as_deref().unwrap_or("-"),
                    t.apellido.as_deref().unwrap_or(""),
                    t.estado.as_deref().unwrap_or("?")
                );
            }
        }
        Entidad::Eventos => {
            for e in api.listar_eventos().await? {
                println!(
                    "{}\t{}\t{}\t{}",
                    e.id,
                    e.fecha.map_or("-".to_string(), |f| f.to_rfc3339()),
                    e.evento_nombre.as_deref().unwrap_or("-"),
                    e.usuario_ejecutor_nombre.as_deref().unwrap_or("-")
                );
            }
        }
        Entidad::Usuarios => {
            for u in api.listar_usuarios().await? {
                println!(
                    "{}\t{}\t{}\t{}",
                    u.id,
                    u.username,
                    u.rol.as_deref().unwrap_or("-"),
                    if u.is_active { "activo" } else { "inactivo" }
                );
            }
        }
    }
    Ok(())
}
