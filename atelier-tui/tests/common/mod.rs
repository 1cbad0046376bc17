#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use atelier_tui::catalog::{
    seed_if_empty, CatalogError, CatalogRepository, Course, ListQuery, Product, SqliteCatalog,
};
use atelier_tui::screens::columns::{course_columns, describe_course, product_columns};
use atelier_tui::screens::{AppMessage, ListScreen};
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub async fn seeded_catalog() -> Arc<SqliteCatalog> {
    let catalog = SqliteCatalog::in_memory().await.unwrap();
    seed_if_empty(&catalog).await.unwrap();
    Arc::new(catalog)
}

pub async fn course_screen() -> (ListScreen<Course>, UnboundedReceiver<AppMessage>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let screen = ListScreen::new(
        "courses",
        "Courses",
        course_columns().unwrap(),
        seeded_catalog().await,
        sender,
        AppMessage::Courses,
    )
    .describe(describe_course);
    (screen, receiver)
}

/// Seeded courses whose `find` fails from `failing_page` on.
pub struct FailingCourses {
    inner: Arc<SqliteCatalog>,
    failing_page: u32,
    failures: AtomicUsize,
}

impl FailingCourses {
    pub async fn from_page(failing_page: u32) -> Arc<Self> {
        Arc::new(Self {
            inner: seeded_catalog().await,
            failing_page,
            failures: AtomicUsize::new(0),
        })
    }

    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogRepository<Course> for FailingCourses {
    async fn find(&self, query: &ListQuery) -> Result<Vec<Course>, CatalogError> {
        if query.page >= self.failing_page {
            self.failures.fetch_add(1, Ordering::SeqCst);
            return Err(CatalogError::InvalidSort("unavailable".into()));
        }
        CatalogRepository::<Course>::find(&*self.inner, query).await
    }

    async fn count(&self, query: &ListQuery) -> Result<u64, CatalogError> {
        CatalogRepository::<Course>::count(&*self.inner, query).await
    }

    async fn get(&self, id: i64) -> Result<Option<Course>, CatalogError> {
        CatalogRepository::<Course>::get(&*self.inner, id).await
    }

    async fn create(&self, record: &Course) -> Result<Course, CatalogError> {
        CatalogRepository::<Course>::create(&*self.inner, record).await
    }

    async fn update(&self, record: &Course) -> Result<(), CatalogError> {
        CatalogRepository::<Course>::update(&*self.inner, record).await
    }

    async fn destroy(&self, id: i64) -> Result<(), CatalogError> {
        CatalogRepository::<Course>::destroy(&*self.inner, id).await
    }
}

pub fn course_screen_over(
    repo: Arc<dyn CatalogRepository<Course>>,
) -> (ListScreen<Course>, UnboundedReceiver<AppMessage>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let screen = ListScreen::new(
        "courses",
        "Courses",
        course_columns().unwrap(),
        repo,
        sender,
        AppMessage::Courses,
    )
    .describe(describe_course);
    (screen, receiver)
}

pub async fn product_screen() -> (ListScreen<Product>, UnboundedReceiver<AppMessage>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let screen = ListScreen::new(
        "products",
        "Products",
        product_columns().unwrap(),
        seeded_catalog().await,
        sender,
        AppMessage::Products,
    );
    (screen, receiver)
}

/// Wait for the next course fetch and hand it to the screen.
pub async fn deliver_courses(screen: &mut ListScreen<Course>, rx: &mut UnboundedReceiver<AppMessage>) {
    match rx.recv().await {
        Some(AppMessage::Courses(fetched)) => screen.receive(fetched),
        other => panic!("expected a course fetch, got {other:?}"),
    }
}
