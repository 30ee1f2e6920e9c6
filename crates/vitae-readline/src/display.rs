//! Terminal rendering of the profile screen.

use colored::{ColoredString, Colorize};

use vitae_application::profile::render::{
    BadgeTone, CareerClass, FormField, InputKind, ProfilePage,
};
use vitae_application::ProfileScreen;

pub fn print_screen(screen: &ProfileScreen) {
    match screen {
        ProfileScreen::Loading => println!("{}", "Carregando...".bright_black()),
        ProfileScreen::Redirecting { route } => {
            println!("{}", format!("Redirecionando para {}", route).bright_black())
        }
        ProfileScreen::NotFound { message } => println!("{}", message.red()),
        ProfileScreen::Profile(page) => print_page(page),
    }
}

fn print_page(page: &ProfilePage) {
    let actions: Vec<String> = page
        .actions
        .iter()
        .map(|action| format!("[{}]", action.label()))
        .collect();
    println!(
        "{}  {}",
        page.title.bright_magenta().bold(),
        actions.join(" ").bright_black()
    );
    println!();

    let avatar = if page.avatar.image.is_some() {
        "(foto)"
    } else {
        "(sem foto)"
    };
    println!("  {} {}", avatar.bright_black(), page.name.bold());
    println!("  {}", page.email);
    println!("  {} · {}", page.academic_title, page.institution);
    println!("  {}", badge(&page.badge.label, page.badge.tone));

    if let Some(form) = &page.form {
        println!();
        for field in form {
            print_field(field);
        }
    }

    if let Some(links) = &page.links {
        section("Links");
        for link in links {
            println!("  {} {}", link.category.bold(), link.url.bright_blue());
        }
    }

    if let Some(publications) = &page.publications {
        section("Publicações");
        for publication in publications {
            println!("  {}", publication.description);
            println!("    {}", publication.url.bright_blue());
        }
    }

    if let Some(careers) = &page.careers {
        section("Carreira");
        for career in careers {
            let tag = match career.class {
                CareerClass::Academic => career.category.green(),
                CareerClass::NonAcademic => career.category.cyan(),
            };
            println!("  {} [{}] {}", career.name.bold(), tag, career.period.bright_black());
            if !career.description.is_empty() {
                println!("    {}", career.description);
            }
        }
    }

    section("Conta");
    println!("  ID: {}", page.account.id);
    println!("  Membro desde: {}", page.account.member_since);

    if let Some(overlay) = &page.image_editor {
        println!();
        println!("{}", format!("== {} ==", overlay.title).bright_yellow());
        println!(
            "{}",
            "Use 'photo <arquivo>' para enviar ou 'close' para fechar.".bright_black()
        );
    }
}

fn print_field(field: &FormField) {
    let value = if field.value.is_empty() {
        "-".bright_black()
    } else {
        field.value.normal()
    };
    println!("  {:<22} {}", format!("{}:", field.label).cyan(), value);
    if let InputKind::Select { options } = &field.input {
        println!("  {:<22} {}", "", options.join(" | ").bright_black());
    }
}

fn section(title: &str) {
    println!();
    println!("{}", title.bright_magenta());
}

fn badge(label: &str, tone: BadgeTone) -> ColoredString {
    let text = format!(" {} ", label);
    match tone {
        BadgeTone::Green => text.black().on_green(),
        BadgeTone::Blue => text.white().on_blue(),
        BadgeTone::Yellow => text.black().on_yellow(),
        BadgeTone::Red => text.white().on_red(),
    }
}
