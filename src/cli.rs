use std::io::Write;
use anyhow::bail;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use crate::storefront::api::BookstoreApi;
use crate::storefront::controller::ViewController;
use crate::storefront::view::binding::Event;
use crate::storefront::view::document::{AddBookForm, CheckoutForm, PageId};

#[derive(Parser, Debug)]
#[command(name = "bookstore")]
#[command(about = "storefront client used by shoppers and staff to browse books, fill a cart and place orders", version, long_about = None
)]
pub(crate) struct Cli {
    #[arg(long, global = true, help = "Base url of the rest api, overrides BOOKSTORE_API_BASE.", value_name = "URL")]
    pub api_base: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

/// one line typed into the shell
#[derive(Parser, Debug)]
#[command(name = "bookstore", no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// catalogue related ops
    #[command(arg_required_else_help = true)]
    Books(BooksArgs),
    /// cart related ops
    #[command(arg_required_else_help = true)]
    Cart(CartArgs),
    /// place an order for everything in the cart
    Checkout(CheckoutArgs),
    /// look up placed orders
    #[command(arg_required_else_help = true)]
    Orders(OrdersArgs),
    /// switch to another page
    #[command(arg_required_else_help = true)]
    Page { page: Page },
    /// click a rendered element, e.g. `click add-to-cart-3`
    #[command(arg_required_else_help = true)]
    Click { target: String },
    /// change the value of a rendered input, e.g. `change quantity-7 2`
    #[command(arg_required_else_help = true)]
    Change { target: String, value: String },
    /// keep one session open and read commands from stdin
    Shell,
}

#[derive(Debug, Args)]
pub(crate) struct BooksArgs {
    #[command(subcommand)]
    command: BookCmds,
}

#[derive(Debug, Subcommand)]
enum BookCmds {
    List,
    #[command(arg_required_else_help = true)]
    Search {
        #[arg(help = "Words to look for in titles and authors.", num_args = 1..)]
        query: Vec<String>,
    },
    #[command(arg_required_else_help = true)]
    Show {
        #[arg(help = "Id of the book to show.", value_name = "BOOK_ID")]
        id: i64,
    },
    #[command(arg_required_else_help = true)]
    Add(AddBookArgs),
}

#[derive(Debug, Args)]
struct AddBookArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    author: String,
    #[arg(long, default_value = "")]
    isbn: String,
    #[arg(long)]
    price: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long)]
    stock: String,
}

#[derive(Debug, Args)]
pub(crate) struct CartArgs {
    #[command(subcommand)]
    command: CartCmds,
}

#[derive(Debug, Subcommand)]
enum CartCmds {
    List,
    #[command(arg_required_else_help = true)]
    Add {
        #[arg(help = "Id of the book to add one copy of.", value_name = "BOOK_ID")]
        book_id: i64,
    },
    #[command(arg_required_else_help = true)]
    Update {
        #[arg(value_name = "CART_ITEM_ID")]
        item_id: i64,
        #[arg(value_parser = clap::value_parser!(i32).range(1..))]
        quantity: i32,
    },
    #[command(arg_required_else_help = true)]
    Remove {
        #[arg(value_name = "CART_ITEM_ID")]
        item_id: i64,
    },
    Total,
}

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    address: String,
}

#[derive(Debug, Args)]
pub(crate) struct OrdersArgs {
    #[command(subcommand)]
    command: OrderCmds,
}

#[derive(Debug, Subcommand)]
enum OrderCmds {
    #[command(arg_required_else_help = true)]
    List {
        #[arg(long, help = "Email the orders were placed with.")]
        email: String,
    },
    #[command(arg_required_else_help = true)]
    Show {
        #[arg(value_name = "ORDER_ID")]
        id: i64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Page {
    Home,
    Cart,
    Checkout,
    Admin,
    Orders,
}

impl Commands {
    /// Commands that read or change the cart. The backend keeps the cart in
    /// the http session, which a fresh process starts empty.
    fn needs_session(&self) -> bool {
        matches!(
            self,
            Commands::Cart(_) | Commands::Checkout(_) | Commands::Page { page: Page::Cart | Page::Checkout }
        )
    }
}

/// Refuse commands that make no sense in a process of their own.
pub(crate) fn ensure_one_shot(command: &Commands) -> anyhow::Result<()> {
    if command.needs_session() {
        bail!("the cart only lives as long as the session, run this command inside `bookstore shell`");
    }
    Ok(())
}

/// Run one command against the controller.
pub(crate) async fn execute<A: BookstoreApi>(controller: &mut ViewController<A>, command: Commands) {
    match command {
        Commands::Books(args) => match args.command {
            BookCmds::List => {
                controller.show_page(PageId::Home).await;
                controller.load_books().await;
            }
            BookCmds::Search { query } => {
                controller.document_mut().search_input = query.join(" ");
                controller.show_page(PageId::Home).await;
                controller.search_books().await;
            }
            BookCmds::Show { id } => controller.show_book_details(id).await,
            BookCmds::Add(args) => {
                let form = &mut controller.document_mut().add_book_form;
                form.title = args.title;
                form.author = args.author;
                form.isbn = args.isbn;
                form.price = args.price;
                form.description = args.description;
                form.stock = args.stock;
                controller.show_page(PageId::Admin).await;
                controller.add_book().await;
            }
        },
        Commands::Cart(args) => match args.command {
            CartCmds::List => controller.show_page(PageId::Cart).await,
            CartCmds::Add { book_id } => controller.add_to_cart(book_id).await,
            CartCmds::Update { item_id, quantity } => controller.update_cart_item_quantity(item_id, quantity).await,
            CartCmds::Remove { item_id } => controller.remove_cart_item(item_id).await,
            CartCmds::Total => controller.update_cart_total().await,
        },
        Commands::Checkout(args) => {
            controller.load_cart_items().await;
            controller.show_checkout();
            if controller.document().active_page() != PageId::Checkout {
                return;
            }
            let form = &mut controller.document_mut().checkout_form;
            form.customer_name = args.name;
            form.customer_email = args.email;
            form.customer_address = args.address;
            controller.place_order().await;
        }
        Commands::Orders(args) => match args.command {
            OrderCmds::List { email } => {
                controller.document_mut().order_email = email;
                controller.load_order_history().await;
            }
            OrderCmds::Show { id } => controller.show_order(id).await,
        },
        Commands::Page { page } => match page {
            Page::Home => controller.show_page(PageId::Home).await,
            Page::Cart => controller.show_page(PageId::Cart).await,
            Page::Checkout => controller.show_checkout(),
            Page::Admin => controller.show_page(PageId::Admin).await,
            Page::Orders => controller.show_page(PageId::Orders).await,
        },
        Commands::Click { target } => {
            if !controller.dispatch(&target, Event::Click).await {
                println!("nothing to click on {}", target);
            }
        }
        Commands::Change { target, value } => {
            if !controller.dispatch(&target, Event::Change(value)).await {
                println!("nothing to change on {}", target);
            }
        }
        Commands::Shell => warn!("already in a shell"),
    }
}

/// Print the active page and the toasts still on screen.
pub(crate) fn print_document<A: BookstoreApi>(controller: &mut ViewController<A>) {
    let books = controller.state().current_books().len();
    let document = controller.document_mut();
    document.toasts.prune();
    for toast in document.toasts.visible() {
        println!("[{}] {}", toast.kind, toast.message);
    }
    let page = document.active_page();
    println!("--- {} | cart ({}) ---", page.element_id(), document.cart_count);
    match page {
        PageId::Home => {
            println!("{} books", books);
            println!("{}", document.books_grid.html().trim());
        }
        PageId::Cart => {
            println!("{}", document.cart_items.html().trim());
            println!("Total: ${}", document.cart_total);
        }
        PageId::Checkout => {
            let form = &document.checkout_form;
            println!("{}", CheckoutForm::ID);
            println!("  customer-name: {}", form.customer_name);
            println!("  customer-email: {}", form.customer_email);
            println!("  customer-address: {}", form.customer_address);
        }
        PageId::Admin => {
            let form = &document.add_book_form;
            println!("{}", AddBookForm::ID);
            println!("  book-title: {}", form.title);
            println!("  book-author: {}", form.author);
            println!("  book-isbn: {}", form.isbn);
            println!("  book-price: {}", form.price);
            println!("  book-description: {}", form.description);
            println!("  book-stock: {}", form.stock);
        }
        PageId::Details => println!("{}", document.book_details.html().trim()),
        PageId::Orders => {
            println!("order-email: {}", document.order_email);
            println!("{}", document.order_history.html().trim());
            println!("{}", document.order_details.html().trim());
        }
    }
}

/// Read commands line by line with one controller, so the cart survives
/// between commands.
pub(crate) async fn shell<A: BookstoreApi>(controller: &mut ViewController<A>) -> anyhow::Result<()> {
    controller.initialize().await;
    print_document(controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("bookstore> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        match line {
            "" => continue,
            "exit" | "quit" => break,
            _ => {}
        }
        let Some(words) = shlex::split(line) else {
            println!("unbalanced quotes in {:?}", line);
            continue;
        };
        match ShellLine::try_parse_from(words) {
            Ok(ShellLine { command }) => {
                debug!("shell command={:?}", command);
                execute(controller, command).await;
                print_document(controller);
            }
            Err(e) => e.print()?,
        }
    }
    Ok(())
}
