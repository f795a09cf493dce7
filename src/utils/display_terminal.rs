//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 부팅 과정에서 사용하는 터미널 출력 함수들을 모았습니다.
//! 박스 제목, 단계 진행 표시, 하위 작업 상태, 최종 요약을 시각적으로 표현합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// Unicode 박스 문자로 제목을 감싸 부팅 로그에서 눈에 띄게 만듭니다.
/// 제목 텍스트는 박스 내부에서 중앙 정렬됩니다.
///
/// # Arguments
///
/// * `title` - 출력할 제목 문자열
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::display_terminal::print_boxed_title;
///
/// print_boxed_title("System Started");
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);  // ^49로 49칸 중앙 정렬
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// # Arguments
///
/// * `step` - 단계 번호 (1부터 시작)
/// * `description` - 단계 설명
///
/// # Examples
///
/// ```rust,ignore
/// print_step_start(1, "Creating Repository instances");
/// ```
///
/// Output:
/// ```text
/// → Step 1: Creating Repository instances
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// 체크 표시와 함께 처리된 항목 수를 출력합니다.
///
/// # Arguments
///
/// * `step` - 완료된 단계 번호
/// * `description` - 단계 설명
/// * `count` - 처리된 항목 수
///
/// # Examples
///
/// ```rust,ignore
/// print_step_complete(1, "Repository instances created", 1);
/// ```
///
/// Output:
/// ```text
/// ✓ Step 1: Repository instances created (1 items)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// 들여쓰기된 트리 구조로 하위 작업의 진행 상황을 출력합니다.
///
/// # Arguments
///
/// * `name` - 서브 작업의 이름
/// * `status` - 현재 상태 또는 결과
///
/// # Examples
///
/// ```rust,ignore
/// print_sub_task("employee_repository", "Creating...");
/// print_sub_task("employee_repository", "✓ Created");
/// ```
///
/// Output:
/// ```text
///    ├─ employee_repository: Creating...
///    ├─ employee_repository: ✓ Created
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 최종 완료 요약을 출력합니다
///
/// 레지스트리 초기화가 끝난 뒤 등록된 컴포넌트 수를
/// 강조된 형태로 출력합니다.
///
/// # Arguments
///
/// * `repos` - 등록된 리포지토리 수
/// * `services` - 등록된 서비스 수
///
/// # Examples
///
/// ```rust,ignore
/// print_final_summary(1, 1);
/// ```
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║          🎉 SERVICE REGISTRY INITIALIZED         ║
/// ╚══════════════════════════════════════════════════╝
///    📦 Repositories: 1
///    🔧 Services: 1
///    🚀 Total Components: 2
/// ```
pub fn print_final_summary(repos: usize, services: usize) {
    let total = repos + services;
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", total);
    println!();
}

/// 캐시 초기화 완료 상태를 출력합니다
///
/// 이름 캐시가 구성되었음을 서브 작업 형태로 표시합니다.
///
/// # Arguments
///
/// * `cache_type` - 캐시 유형 (예: "Service", "Repository")
/// * `count` - 로드된 항목 수
///
/// # Examples
///
/// ```rust,ignore
/// print_cache_initialized("Repository", 1);
/// ```
///
/// Output:
/// ```text
///    ├─ Repository Cache: 1 entries loaded
/// ```
pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}
