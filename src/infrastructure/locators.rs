//! 站点选择器 - 基础设施层
//!
//! 全部站点相关的 CSS 选择器集中在这里；
//! 页面结构变更时只需要修改本模块

/// 站点选择器集合
#[derive(Debug, Clone)]
pub struct PortalLocators {
    // ---- 登录页 ----
    /// 页面主体（用于确认页面已加载）
    pub page_body: &'static str,
    /// 邮箱输入框
    pub login_email: &'static str,
    /// 密码输入框
    pub login_password: &'static str,
    /// 登录按钮
    pub login_submit: &'static str,
    /// 登录后的全局导航栏
    pub global_nav: &'static str,

    // ---- 搜索页 ----
    /// 关键词输入框
    pub search_keywords_input: &'static str,
    /// 地点输入框
    pub search_location_input: &'static str,
    /// 搜索结果列表容器
    pub results_list: &'static str,
    /// 结果数量标签
    pub results_count_label: &'static str,

    // ---- 筛选面板 ----
    /// "所有筛选"按钮
    pub all_filters_button: &'static str,
    /// 筛选面板容器
    pub filter_panel: &'static str,
    /// "快速申请"开关
    pub easy_apply_toggle: &'static str,
    /// "显示结果"按钮
    pub show_results_button: &'static str,

    // ---- 结果列表 ----
    /// 单个结果条目
    pub result_item: &'static str,
    /// 结果条目中的职位标题链接
    pub result_title: &'static str,

    // ---- 职位详情 ----
    /// 详情面板容器
    pub detail_container: &'static str,
    /// 职位名称
    pub detail_title: &'static str,
    /// 公司名称
    pub detail_company: &'static str,
    /// 工作地点
    pub detail_location: &'static str,
    /// 职位描述
    pub detail_description: &'static str,
    /// 投递按钮
    pub apply_button: &'static str,
}

impl Default for PortalLocators {
    fn default() -> Self {
        Self {
            page_body: "body",
            login_email: "#username",
            login_password: "#password",
            login_submit: "button[type='submit']",
            global_nav: "#global-nav",

            search_keywords_input:
                "input.jobs-search-box__text-input[id*='jobs-search-box-keyword-id']",
            search_location_input:
                "input.jobs-search-box__text-input[id*='jobs-search-box-location-id']",
            results_list: ".jobs-search-results-list",
            results_count_label: ".jobs-search-results-list__title-heading",

            all_filters_button: "button.search-reusables__filter-pill-button",
            filter_panel: ".search-reusables__secondary-filters",
            easy_apply_toggle: "label[for*='adToggle_ember']",
            show_results_button: "button.search-reusables__secondary-filters-show-results-button",

            result_item: ".jobs-search-results__list-item",
            result_title: ".jobs-search-results__list-item .job-card-list__title",

            detail_container: ".jobs-search__job-details--container",
            detail_title: ".job-details-jobs-unified-top-card__job-title",
            detail_company: ".job-details-jobs-unified-top-card__company-name",
            detail_location: ".job-details-jobs-unified-top-card__primary-description-container",
            detail_description: ".jobs-description__content",
            apply_button: ".jobs-apply-button",
        }
    }
}
