use academic_planner::config::DisplayConfig;
use academic_planner::entities::{
    Assessment, Attachment, Category, Collections, Coursework, Item, ItemDetails, ItemId, Material, Status,
};
use academic_planner::ui::components::{DashboardComponent, ItemListComponent};
use academic_planner::ui::core::Component;
use academic_planner::ui::view::*;
use chrono::{NaiveDate, TimeZone, Utc};
use ratatui::{backend::TestBackend, text::Line, Terminal};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn item(id: &str, title: &str, details: ItemDetails) -> Item {
    Item {
        id: ItemId::new(id),
        title: title.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        details,
    }
}

fn work(deadline: Option<NaiveDate>, status: Status) -> Coursework {
    Coursework {
        course: Some("CS101".to_string()),
        deadline,
        status,
    }
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn sample() -> Collections {
    let mut items = Collections::default();
    items.projects.push(item(
        "1",
        "Thesis",
        ItemDetails::Project(work(Some(date(2025, 3, 1)), Status::Pending)),
    ));
    items.projects.push(item(
        "2",
        "Old report",
        ItemDetails::Project(work(Some(date(2025, 1, 1)), Status::Done)),
    ));
    items.cts.push(item(
        "3",
        "Final exam",
        ItemDetails::Ct(Assessment {
            course: None,
            deadline: Some(date(2025, 12, 1)),
        }),
    ));
    items.assignments.push(item(
        "4",
        "Essay",
        ItemDetails::Assignment(work(Some(date(2025, 6, 1)), Status::Pending)),
    ));
    items
}

#[test]
fn test_upcoming_sorted_and_future_only() {
    let items = sample();
    let summary = DashboardSummary::build(&items, date(2025, 2, 1));

    let deadlines: Vec<NaiveDate> = summary.upcoming.iter().filter_map(|i| i.deadline()).collect();
    assert_eq!(deadlines, vec![date(2025, 3, 1), date(2025, 6, 1), date(2025, 12, 1)]);
}

#[test]
fn test_deadline_today_is_not_upcoming() {
    let items = sample();
    let summary = DashboardSummary::build(&items, date(2025, 3, 1));
    assert!(summary.upcoming.iter().all(|i| i.deadline() > Some(date(2025, 3, 1))));
    assert_eq!(summary.upcoming.len(), 2);
}

#[test]
fn test_upcoming_is_capped() {
    let mut items = Collections::default();
    for day in 1..=8 {
        items.cts.push(item(
            &day.to_string(),
            &format!("Quiz {}", day),
            ItemDetails::Ct(Assessment {
                course: None,
                deadline: Some(date(2025, 5, day)),
            }),
        ));
    }
    let summary = DashboardSummary::build(&items, date(2025, 2, 1));
    assert_eq!(summary.upcoming.len(), 5);
    assert_eq!(summary.upcoming[0].title, "Quiz 1");
    assert_eq!(summary.upcoming[4].title, "Quiz 5");
}

#[test]
fn test_pending_excludes_done() {
    let items = sample();
    let summary = DashboardSummary::build(&items, date(2025, 2, 1));
    let titles: Vec<&str> = summary.pending_projects.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Thesis"]);
    assert_eq!(summary.pending_assignments.len(), 1);
}

fn render(component: &mut dyn Component) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| component.render(f, f.area())).unwrap();
    let buffer = terminal.backend().buffer().clone();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn dashboard(items: Collections, today: NaiveDate) -> DashboardComponent {
    let mut component = DashboardComponent::new();
    component.update_data(items, today);
    component
}

#[test]
fn test_empty_dashboard_messages() {
    let screen = render(&mut dashboard(Collections::default(), date(2025, 2, 1)));

    assert!(screen.contains("Upcoming Deadlines"));
    assert!(screen.contains("No upcoming deadlines."));
    assert!(screen.contains("No pending projects. Great job!"));
    assert!(screen.contains("No pending assignments. All clear!"));
    assert!(screen.contains("Add Project"));
    assert!(screen.contains("Add Class"));
}

#[test]
fn test_dashboard_shows_relative_deadline() {
    let screen = render(&mut dashboard(sample(), date(2025, 2, 28)));
    assert!(screen
        .lines()
        .any(|l| l.contains("Thesis") && l.contains("2025-03-01 (tomorrow)")));
    // Done work is not pending
    assert!(!screen.contains("Old report"));
}

#[test]
fn test_empty_category_message() {
    assert_eq!(
        empty_category_message(Category::Projects),
        "No projects yet. Add one to get started!"
    );
    assert_eq!(
        empty_category_message(Category::Books),
        "No books yet. Add one to get started!"
    );

    let mut list = ItemListComponent::new();
    list.update_data(Category::Classes, Vec::new(), date(2025, 2, 1));
    let screen = render(&mut list);
    assert!(screen.contains("No classes yet."));
    assert!(screen.contains("Add Class"));
}

#[test]
fn test_category_list_rows() {
    let items = sample();
    let mut list = ItemListComponent::new();
    list.update_data(Category::Projects, items.projects.clone(), date(2025, 2, 1));
    let screen = render(&mut list);

    assert!(screen.contains("Projects"));
    assert!(screen.contains("[ ] Thesis #CS101"));
    assert!(screen.contains("[x] Old report"));
    // Hints for the selected row
    assert!(screen.contains("Mark Done"));
}

#[test]
fn test_item_line_fields() {
    let book = item(
        "9",
        "Linear Algebra",
        ItemDetails::Book(Material {
            semester: Some("Fall".to_string()),
            attachment: Some(Attachment {
                file_name: "notes.pdf".to_string(),
                file_url: "data:application/pdf;base64,JVBERg==".to_string(),
            }),
        }),
    );
    let text = line_text(&item_line(&book, date(2025, 2, 1), &DisplayConfig::default()));
    assert!(text.contains("Linear Algebra"));
    assert!(text.contains("Semester: Fall"));
    assert!(text.contains("notes.pdf"));
    assert!(!text.contains("pending"));

    let items = sample();
    let done = line_text(&item_line(&items.projects[1], date(2025, 2, 1), &DisplayConfig::default()));
    assert!(done.starts_with("[x] "));
    assert!(done.contains("(done)"));
}

#[test]
fn test_item_actions() {
    let items = sample();
    let keys: Vec<&str> = item_actions(&items.projects[0]).iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, vec!["Space", "e", "d"]);
    assert_eq!(item_actions(&items.projects[1])[0].1, "Mark Pending");

    let ct_keys: Vec<&str> = item_actions(&items.cts[0]).iter().map(|(key, _)| *key).collect();
    assert_eq!(ct_keys, vec!["e", "d"]);

    let book = item(
        "5",
        "Notes",
        ItemDetails::Book(Material {
            semester: None,
            attachment: Some(Attachment {
                file_name: "a.txt".to_string(),
                file_url: "data:text/plain;base64,YQ==".to_string(),
            }),
        }),
    );
    assert_eq!(item_actions(&book)[0], ("o", "Download"));
}
