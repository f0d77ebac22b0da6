//! Static platform data: tenants, courses, commerce, career and audit
//! content. This is the demo dataset the screens render; nothing here is
//! fetched over the network. Course and tenant ids are stable strings that
//! the router's selection context refers to.

use crate::session::{BrandColor, Role, Tenant, TenantKind};

// ── Tenants ────────────────────────────────────────────────────

pub static TENANTS: [Tenant; 3] = [
    Tenant {
        id: "umraniye",
        name: "Ümraniye Akademi",
        color: BrandColor::Emerald,
        kind: TenantKind::Municipality,
    },
    Tenant {
        id: "ibb",
        name: "Enstitü İstanbul İSMEK",
        color: BrandColor::Blue,
        kind: TenantKind::Municipality,
    },
    Tenant {
        id: "tech",
        name: "Yazılım Akademisi",
        color: BrandColor::Violet,
        kind: TenantKind::Corporate,
    },
];

pub fn tenant(id: &str) -> Option<&'static Tenant> {
    TENANTS.iter().find(|t| t.id == id)
}

// ── Mock identities ────────────────────────────────────────────

/// Immutable base profile a login starts from; `Session` owns the live copy.
pub struct UserSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub title: &'static str,
    pub tenant_id: Option<&'static str>,
    pub points: u32,
}

const STUDENT_SEED: UserSeed = UserSeed {
    id: "u1",
    name: "Ali Yılmaz",
    email: "ali.yilmaz@student.com",
    title: "Bilgisayar Müh. Öğrencisi",
    tenant_id: Some("umraniye"),
    points: 2150,
};

const ADMIN_SEED: UserSeed = UserSeed {
    id: "a1",
    name: "Ayşe Yönetici",
    email: "ayse@akademi.istanbul",
    title: "Sistem Yöneticisi",
    tenant_id: None,
    points: 0,
};

const INSTRUCTOR_SEED: UserSeed = UserSeed {
    id: "i1",
    name: "Mehmet Hoca",
    email: "mehmet@tech.com",
    title: "Kıdemli Yazılım Eğitmeni",
    tenant_id: Some("tech"),
    points: 0,
};

/// The mock identity backing a role. Tenant admins reuse the admin profile.
pub fn user_seed(role: Role) -> &'static UserSeed {
    match role {
        Role::Instructor => &INSTRUCTOR_SEED,
        Role::Admin | Role::TenantAdmin => &ADMIN_SEED,
        _ => &STUDENT_SEED,
    }
}

// ── Courses ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseCategory {
    ExamPrep,
    Software,
    Professional,
    Language,
}

impl CourseCategory {
    pub fn label(self) -> &'static str {
        match self {
            CourseCategory::ExamPrep => "Sınav Hazırlık",
            CourseCategory::Software => "Yazılım",
            CourseCategory::Professional => "Mesleki Gelişim",
            CourseCategory::Language => "Dil Eğitimi",
        }
    }

    pub fn all() -> &'static [CourseCategory] {
        &[
            CourseCategory::ExamPrep,
            CourseCategory::Software,
            CourseCategory::Professional,
            CourseCategory::Language,
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleKind {
    Video,
    Live,
    Quiz,
    Document,
}

impl ModuleKind {
    pub fn label(self) -> &'static str {
        match self {
            ModuleKind::Video => "Video",
            ModuleKind::Live => "Canlı",
            ModuleKind::Quiz => "Quiz",
            ModuleKind::Document => "Doküman",
        }
    }
}

pub struct QuizQuestion {
    pub text: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
}

pub struct CourseModule {
    pub id: u32,
    pub title: &'static str,
    pub duration: &'static str,
    pub kind: ModuleKind,
    pub completed: bool,
    pub quiz: Option<&'static [QuizQuestion]>,
}

pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub tenant_id: &'static str,
    pub category: CourseCategory,
    pub progress: u8,
    pub instructor: &'static str,
    pub total_modules: u32,
    pub completed_modules: u32,
    pub rating: f32,
    pub is_live: bool,
    pub next_live: Option<&'static str>,
    pub description: &'static str,
    pub modules: &'static [CourseModule],
}

static FUNCTIONS_QUIZ: [QuizQuestion; 3] = [
    QuizQuestion {
        text: "f(x) = 2x + 5 ise f(3) kaçtır?",
        options: &["8", "9", "11", "13"],
        correct: 2,
    },
    QuizQuestion {
        text: "Bir fonksiyonun birebir olması için ne gereklidir?",
        options: &[
            "Yatay doğru testi",
            "Dikey doğru testi",
            "Türev testi",
            "İntegral",
        ],
        correct: 0,
    },
    QuizQuestion {
        text: "Limit x -> 0 iken sin(x)/x değeri nedir?",
        options: &["0", "1", "Tanımsız", "Sonsuz"],
        correct: 1,
    },
];

static YKS_MODULES: [CourseModule; 5] = [
    CourseModule {
        id: 1,
        title: "Fonksiyonlara Giriş",
        duration: "15 dk",
        kind: ModuleKind::Video,
        completed: true,
        quiz: None,
    },
    CourseModule {
        id: 2,
        title: "Grafik Okuma Teknikleri",
        duration: "22 dk",
        kind: ModuleKind::Video,
        completed: true,
        quiz: None,
    },
    CourseModule {
        id: 3,
        title: "Canlı Soru Çözüm Kampı",
        duration: "Canlı",
        kind: ModuleKind::Live,
        completed: false,
        quiz: None,
    },
    CourseModule {
        id: 4,
        title: "Bölüm Sonu Testi",
        duration: "30 dk",
        kind: ModuleKind::Quiz,
        completed: false,
        quiz: Some(&FUNCTIONS_QUIZ),
    },
    CourseModule {
        id: 5,
        title: "Türevin Geometrik Yorumu",
        duration: "18 dk",
        kind: ModuleKind::Video,
        completed: false,
        quiz: None,
    },
];

static REACT_MODULES: [CourseModule; 4] = [
    CourseModule {
        id: 1,
        title: "React Ekosistemi",
        duration: "10 dk",
        kind: ModuleKind::Video,
        completed: true,
        quiz: None,
    },
    CourseModule {
        id: 2,
        title: "Kurulum ve Konfigürasyon",
        duration: "15 dk",
        kind: ModuleKind::Video,
        completed: true,
        quiz: None,
    },
    CourseModule {
        id: 3,
        title: "İlk Bileşen (Component)",
        duration: "20 dk",
        kind: ModuleKind::Video,
        completed: false,
        quiz: None,
    },
    CourseModule {
        id: 4,
        title: "Ders Kaynak Kodları",
        duration: "PDF",
        kind: ModuleKind::Document,
        completed: false,
        quiz: None,
    },
];

pub static COURSES: [Course; 5] = [
    Course {
        id: "1",
        title: "YKS Matematik: İleri Düzey Fonksiyonlar",
        tenant_id: "umraniye",
        category: CourseCategory::ExamPrep,
        progress: 75,
        instructor: "Dr. Ahmet Yılmaz",
        total_modules: 24,
        completed_modules: 18,
        rating: 4.8,
        is_live: true,
        next_live: Some("Bugün, 14:00"),
        description: "Üniversite sınavına hazırlık kapsamında fonksiyonlar, limit ve türev konularının derinlemesine analizi.",
        modules: &YKS_MODULES,
    },
    Course {
        id: "2",
        title: "Sıfırdan İleri Seviye React & Next.js",
        tenant_id: "tech",
        category: CourseCategory::Software,
        progress: 12,
        instructor: "Zeynep Demir (Lead Dev)",
        total_modules: 40,
        completed_modules: 5,
        rating: 4.9,
        is_live: false,
        next_live: None,
        description: "Modern web geliştirme dünyasına adım atın. Hooklar, State yönetimi ve SSR konuları.",
        modules: &REACT_MODULES,
    },
    Course {
        id: "3",
        title: "Dijital Pazarlama ve Sosyal Medya Uzmanlığı",
        tenant_id: "ibb",
        category: CourseCategory::Professional,
        progress: 0,
        instructor: "Caner Öztürk",
        total_modules: 15,
        completed_modules: 0,
        rating: 4.5,
        is_live: false,
        next_live: None,
        description: "KOBİ'ler ve girişimciler için marka yönetimi ve reklam stratejileri.",
        modules: &[],
    },
    Course {
        id: "4",
        title: "LGS Fen Bilimleri: DNA ve Genetik Kod",
        tenant_id: "umraniye",
        category: CourseCategory::ExamPrep,
        progress: 100,
        instructor: "Elif Kaya",
        total_modules: 20,
        completed_modules: 20,
        rating: 4.7,
        is_live: false,
        next_live: None,
        description: "Liseye geçiş sınavı için kritik konuların animasyonlarla anlatımı.",
        modules: &[],
    },
    Course {
        id: "5",
        title: "Sağlık Turizmi ve İngilizce İletişim",
        tenant_id: "ibb",
        category: CourseCategory::Language,
        progress: 0,
        instructor: "Michael Brown",
        total_modules: 12,
        completed_modules: 0,
        rating: 4.6,
        is_live: false,
        next_live: None,
        description: "Sağlık çalışanları için özel hazırlanmış, hasta iletişimi odaklı İngilizce eğitimi.",
        modules: &[],
    },
];

pub fn course(id: &str) -> Option<&'static Course> {
    COURSES.iter().find(|c| c.id == id)
}

/// Courses visible inside a tenant context. With no tenant bound (global
/// admin before scoping), everything is visible.
pub fn courses_for_tenant(tenant_id: Option<&str>) -> Vec<&'static Course> {
    match tenant_id {
        Some(id) => COURSES.iter().filter(|c| c.tenant_id == id).collect(),
        None => COURSES.iter().collect(),
    }
}

// ── Gamification ───────────────────────────────────────────────

pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub earned_at: Option<&'static str>,
}

pub static BADGES: [Badge; 4] = [
    Badge {
        id: "b1",
        name: "Hızlı Başlangıç",
        icon: "🚀",
        description: "Platformdaki ilk dersini başarıyla tamamladın.",
        earned_at: Some("2024-01-10"),
    },
    Badge {
        id: "b2",
        name: "7 Günlük Seri",
        icon: "🔥",
        description: "Öğrenme azmi! 7 gün üst üste giriş yaptın.",
        earned_at: Some("2024-01-17"),
    },
    Badge {
        id: "b3",
        name: "Sınav Canavarı",
        icon: "🏆",
        description: "Türkiye geneli deneme sınavında %90 başarı sağladın.",
        earned_at: None,
    },
    Badge {
        id: "b4",
        name: "Yapay Zeka Meraklısı",
        icon: "🤖",
        description: "Yapay Zeka ile ilgili 3 farklı modülü tamamladın.",
        earned_at: None,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Same,
}

pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: &'static str,
    pub points: u32,
    pub trend: Trend,
}

pub static LEADERBOARD: [LeaderboardEntry; 5] = [
    LeaderboardEntry { rank: 1, name: "Selin Y.", points: 2450, trend: Trend::Same },
    LeaderboardEntry { rank: 2, name: "Burak Ö.", points: 2320, trend: Trend::Up },
    LeaderboardEntry { rank: 3, name: "Ali Yılmaz", points: 2150, trend: Trend::Down },
    LeaderboardEntry { rank: 4, name: "Zeynep A.", points: 1980, trend: Trend::Up },
    LeaderboardEntry { rank: 5, name: "Can K.", points: 1850, trend: Trend::Down },
];

pub struct ForumPost {
    pub user: &'static str,
    pub date: &'static str,
    pub content: &'static str,
    pub likes: u32,
    pub replies: u32,
}

pub static FORUM_POSTS: [ForumPost; 2] = [
    ForumPost {
        user: "Ayşe K.",
        date: "2 saat önce",
        content: "3. Modüldeki türev sorusunda x'in değerini nasıl bulduk? Videoda orası biraz hızlı geçilmiş.",
        likes: 5,
        replies: 2,
    },
    ForumPost {
        user: "Mehmet T.",
        date: "5 saat önce",
        content: "Arkadaşlar bu konunun PDF notlarında sayfa 4 eksik gibi, sizde de öyle mi?",
        likes: 12,
        replies: 8,
    },
];

// ── Career ─────────────────────────────────────────────────────

pub struct Job {
    pub id: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub posted: &'static str,
    pub match_score: u8,
}

pub static JOBS: [Job; 3] = [
    Job {
        id: "j1",
        title: "Junior Frontend Geliştirici",
        company: "İstanbul Bilişim A.Ş.",
        location: "Şişli, İstanbul",
        kind: "Tam Zamanlı",
        posted: "2 gün önce",
        match_score: 95,
    },
    Job {
        id: "j2",
        title: "Veri Analisti Stajyeri",
        company: "İBB Veri Laboratuvarı",
        location: "Maslak, İstanbul",
        kind: "Staj",
        posted: "Yeni",
        match_score: 88,
    },
    Job {
        id: "j3",
        title: "Dijital Medya Uzmanı",
        company: "Kültür A.Ş.",
        location: "Beyoğlu, İstanbul",
        kind: "Tam Zamanlı",
        posted: "1 hafta önce",
        match_score: 70,
    },
];

pub struct Grant {
    pub id: &'static str,
    pub title: &'static str,
    pub organization: &'static str,
    pub deadline: &'static str,
    pub amount: &'static str,
}

pub static GRANTS: [Grant; 3] = [
    Grant {
        id: "1",
        title: "Genç Girişimci Hibe Programı",
        organization: "KOSGEB",
        deadline: "2024-03-01",
        amount: "150.000 TL",
    },
    Grant {
        id: "2",
        title: "Teknoloji Odaklı Sanayi Hamlesi",
        organization: "Sanayi Bakanlığı",
        deadline: "2024-04-15",
        amount: "500.000 TL",
    },
    Grant {
        id: "3",
        title: "Yaratıcı Endüstriler Fonu",
        organization: "İSTKA",
        deadline: "2024-02-28",
        amount: "250.000 TL",
    },
];

// ── Commerce ───────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductKind {
    Course,
    Subscription,
}

/// A purchasable item as seeded into the demo cart.
#[derive(Debug)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub kind: ProductKind,
}

pub static CART_SEED: [Product; 2] = [
    Product {
        id: "p1",
        name: "İleri Seviye React Eğitimi",
        description: "Kapsamlı React kursu",
        price: 499,
        kind: ProductKind::Course,
    },
    Product {
        id: "p2",
        name: "Yıllık Pro Üyelik",
        description: "Tüm eğitimlere sınırsız erişim",
        price: 1200,
        kind: ProductKind::Subscription,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn label(self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Ödendi",
            InvoiceStatus::Pending => "Bekliyor",
            InvoiceStatus::Overdue => "Gecikmiş",
        }
    }
}

pub struct Invoice {
    pub id: &'static str,
    pub date: &'static str,
    pub amount: u32,
    pub status: InvoiceStatus,
    pub items: &'static [&'static str],
}

pub static INVOICES: [Invoice; 2] = [
    Invoice {
        id: "INV-2024-001",
        date: "2024-01-15",
        amount: 499,
        status: InvoiceStatus::Paid,
        items: &["İleri Seviye React Eğitimi"],
    },
    Invoice {
        id: "INV-2023-128",
        date: "2023-12-20",
        amount: 1200,
        status: InvoiceStatus::Paid,
        items: &["Yıllık Pro Üyelik"],
    },
];

pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

pub static PLANS: [Plan; 3] = [
    Plan {
        id: "basic",
        name: "Başlangıç",
        price: 0,
        features: &["Temel Dersler", "Sertifika Yok", "Topluluk Erişimi"],
        recommended: false,
    },
    Plan {
        id: "pro",
        name: "Profesyonel",
        price: 199,
        features: &[
            "Tüm Dersler",
            "Sertifikalar",
            "Canlı Soru-Cevap",
            "Kariyer Danışmanlığı",
        ],
        recommended: true,
    },
    Plan {
        id: "enterprise",
        name: "Kurumsal",
        price: 999,
        features: &[
            "Sınırsız Kullanıcı",
            "Özel Raporlama",
            "API Erişimi",
            "Özel Eğitmen Desteği",
        ],
        recommended: false,
    },
];

// ── Studio booking ─────────────────────────────────────────────

/// Seed availability for a studio day; booking state lives in the screen.
pub static STUDIO_SLOTS: [(&str, bool); 6] = [
    ("09:00", true),
    ("10:00", false),
    ("11:00", true),
    ("13:00", true),
    ("14:00", true),
    ("15:00", false),
];

// ── User management ────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrollmentStatus {
    Active,
    Inactive,
}

impl EnrollmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "Aktif",
            EnrollmentStatus::Inactive => "Pasif",
        }
    }
}

pub struct StudentRecord {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub course: &'static str,
    pub progress: u8,
    pub status: EnrollmentStatus,
    pub last_login: &'static str,
}

pub static STUDENTS: [StudentRecord; 6] = [
    StudentRecord { id: 1, name: "Ali Yılmaz", email: "ali.yilmaz@student.com", course: "YKS Matematik", progress: 75, status: EnrollmentStatus::Active, last_login: "2 saat önce" },
    StudentRecord { id: 2, name: "Ayşe Demir", email: "ayse.demir@example.com", course: "React & Next.js", progress: 12, status: EnrollmentStatus::Active, last_login: "1 gün önce" },
    StudentRecord { id: 3, name: "Mehmet Kaya", email: "mehmet.k@example.com", course: "Dijital Pazarlama", progress: 45, status: EnrollmentStatus::Inactive, last_login: "2 hafta önce" },
    StudentRecord { id: 4, name: "Zeynep Çelik", email: "zeynep.c@example.com", course: "İngilizce A1", progress: 90, status: EnrollmentStatus::Active, last_login: "30 dk önce" },
    StudentRecord { id: 5, name: "Can Öztürk", email: "can.oz@example.com", course: "YKS Matematik", progress: 100, status: EnrollmentStatus::Active, last_login: "5 saat önce" },
    StudentRecord { id: 6, name: "Elif Su", email: "elif.su@example.com", course: "React & Next.js", progress: 0, status: EnrollmentStatus::Inactive, last_login: "1 ay önce" },
];

pub fn student(id: u32) -> Option<&'static StudentRecord> {
    STUDENTS.iter().find(|s| s.id == id)
}

// ── Audit log ──────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogActor {
    SuperAdmin,
    Admin,
    Instructor,
    Student,
}

impl LogActor {
    pub fn label(self) -> &'static str {
        match self {
            LogActor::SuperAdmin => "Süper Admin",
            LogActor::Admin => "Admin",
            LogActor::Instructor => "Eğitmen",
            LogActor::Student => "Öğrenci",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogAction {
    Create,
    Update,
    Delete,
    Login,
    Complete,
    Error,
}

impl LogAction {
    pub fn label(self) -> &'static str {
        match self {
            LogAction::Create => "Oluşturma",
            LogAction::Update => "Güncelleme",
            LogAction::Delete => "Silme",
            LogAction::Login => "Giriş",
            LogAction::Complete => "Tamamlama",
            LogAction::Error => "Hata",
        }
    }
}

pub struct AuditEntry {
    pub id: &'static str,
    pub user: &'static str,
    pub actor: LogActor,
    pub action: LogAction,
    pub description: &'static str,
    pub target: &'static str,
    pub timestamp: &'static str,
    pub ip: &'static str,
    /// `"global"` for platform-wide events, otherwise a tenant id.
    pub tenant_id: &'static str,
}

pub static AUDIT_LOG: [AuditEntry; 10] = [
    AuditEntry { id: "L001", user: "Süper Admin", actor: LogActor::SuperAdmin, action: LogAction::Update, description: "Platform genel ayarları güncellendi", target: "Sistem", timestamp: "Şimdi", ip: "192.168.1.1", tenant_id: "global" },
    AuditEntry { id: "L002", user: "Mehmet Hoca", actor: LogActor::Instructor, action: LogAction::Create, description: "Yeni ders videosu eklendi", target: "Unity 101", timestamp: "5 dk önce", ip: "176.24.12.55", tenant_id: "tech" },
    AuditEntry { id: "L003", user: "Ali Yılmaz", actor: LogActor::Student, action: LogAction::Complete, description: "Quiz tamamlandı", target: "React Temelleri", timestamp: "12 dk önce", ip: "88.12.43.12", tenant_id: "tech" },
    AuditEntry { id: "L004", user: "Zeynep Demir", actor: LogActor::Instructor, action: LogAction::Create, description: "Yeni sınav oluşturuldu", target: "C# Vize Sınavı", timestamp: "25 dk önce", ip: "176.24.12.90", tenant_id: "tech" },
    AuditEntry { id: "L005", user: "Can Öztürk", actor: LogActor::Student, action: LogAction::Login, description: "Sisteme giriş yapıldı", target: "Oturum", timestamp: "40 dk önce", ip: "92.11.33.21", tenant_id: "umraniye" },
    AuditEntry { id: "L006", user: "Selin Y.", actor: LogActor::Student, action: LogAction::Error, description: "Başarısız giriş denemesi", target: "Oturum", timestamp: "1 saat önce", ip: "145.22.11.99", tenant_id: "ibb" },
    AuditEntry { id: "L007", user: "Ayşe Yönetici", actor: LogActor::Admin, action: LogAction::Delete, description: "Eski duyuru silindi", target: "Duyurular", timestamp: "2 saat önce", ip: "192.168.1.1", tenant_id: "umraniye" },
    AuditEntry { id: "L008", user: "Mehmet Hoca", actor: LogActor::Instructor, action: LogAction::Update, description: "Ders içeriği düzenlendi", target: "Oyun Tasarımı", timestamp: "3 saat önce", ip: "176.24.12.55", tenant_id: "tech" },
    AuditEntry { id: "L009", user: "Burak Ö.", actor: LogActor::Student, action: LogAction::Complete, description: "Modül tamamlandı", target: "SEO Giriş", timestamp: "4 saat önce", ip: "77.12.55.11", tenant_id: "ibb" },
    AuditEntry { id: "L010", user: "Ahmet Y.", actor: LogActor::Admin, action: LogAction::Create, description: "Yeni kullanıcı eklendi", target: "Kullanıcılar", timestamp: "5 saat önce", ip: "192.168.1.1", tenant_id: "ibb" },
];

// ── Support ────────────────────────────────────────────────────

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct FaqCategory {
    pub name: &'static str,
    pub entries: &'static [FaqEntry],
}

pub static FAQ: [FaqCategory; 3] = [
    FaqCategory {
        name: "Genel",
        entries: &[
            FaqEntry {
                question: "Akademi İstanbul nedir?",
                answer: "Akademi İstanbul, İstanbul'daki belediyeler, üniversiteler ve kurumları tek bir çatı altında toplayan, çok paydaşlı bir öğrenme ve kariyer platformudur.",
            },
            FaqEntry {
                question: "Üyelik ücretli mi?",
                answer: "Platforma kayıt olmak tamamen ücretsizdir. Çoğu eğitim belediyeler tarafından ücretsiz sunulmaktadır, ancak bazı özel sertifika programları ücretli olabilir.",
            },
        ],
    },
    FaqCategory {
        name: "Sertifikalar",
        entries: &[
            FaqEntry {
                question: "Sertifikamı ne zaman alabilirim?",
                answer: "Bir eğitimi %100 tamamlayıp, varsa bitirme sınavından en az 70 puan aldığınızda sertifikanız otomatik olarak üretilir ve profilinize eklenir.",
            },
            FaqEntry {
                question: "Sertifikalarım resmi olarak geçerli mi?",
                answer: "Evet, sertifikalarımız Blockchain altyapısı ile doğrulanabilir ve CV'nizde kullanabileceğiniz geçerliliğe sahiptir.",
            },
        ],
    },
    FaqCategory {
        name: "Teknik Sorunlar",
        entries: &[
            FaqEntry {
                question: "Canlı derslere katılamıyorum, ne yapmalıyım?",
                answer: "Öncelikle internet bağlantınızı kontrol edin. Tarayıcınızın kamera ve mikrofon izinlerini verdiğinizden emin olun. Sorun devam ederse farklı bir tarayıcı (Chrome, Edge) deneyin.",
            },
            FaqEntry {
                question: "Şifremi unuttum, nasıl sıfırlarım?",
                answer: "Giriş ekranında bulunan 'Şifremi Unuttum' bağlantısına tıklayarak e-posta adresinize sıfırlama linki gönderebilirsiniz.",
            },
        ],
    },
];

// ── Activation ─────────────────────────────────────────────────

/// Activation codes handed out by partner institutions: code → tenant.
pub static ACTIVATION_CODES: [(&str, &str, &str); 2] = [
    ("IBB2024", "ibb", "Kod doğrulandı: İBB Akademi"),
    ("TECH101", "tech", "Kod doğrulandı: Yazılım Akademisi"),
];
